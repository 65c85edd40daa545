mod docs;
mod home;
mod terminal;

pub(crate) use docs::render_docs;
pub(crate) use home::render_home;
pub(crate) use terminal::render_terminal;
