pub struct SocialLink {
    pub label: &'static str,
    pub url: &'static str,
}

pub struct SocialLinks {
    pub twitter: SocialLink,
    pub telegram: SocialLink,
}

impl SocialLinks {
    pub fn all(&self) -> [&SocialLink; 2] {
        [&self.twitter, &self.telegram]
    }
}

pub const LINKS: SocialLinks = SocialLinks {
    twitter: SocialLink {
        label: "VerbotAi",
        url: "https://twitter.com/VerbotAi",
    },
    telegram: SocialLink {
        label: "Telegram",
        url: "https://t.me/verbotai",
    },
};
