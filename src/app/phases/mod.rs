pub(super) mod docs;
pub(super) mod home;
pub(super) mod page_view;
pub(super) mod terminal;

pub(crate) use page_view::PageView;
