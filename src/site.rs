//! Compile-time identity of the site owner.
//!
//! Runtime settings (listen address, asset paths, reload port) come from
//! `[package.metadata.leptos]` in `Cargo.toml` and `LEPTOS_*` environment
//! variables; everything here is content that never changes between deploys.

pub struct SocialLink {
    pub label: &'static str,
    pub href: &'static str,
}

pub struct SiteConfig {
    pub owner: &'static str,
    pub role: &'static str,
    pub domain: &'static str,
    pub base_url: &'static str,
    pub email: &'static str,
    pub phone: &'static str,
    pub phone_href: &'static str,
    pub location: &'static str,
    pub blog_title: &'static str,
    pub blog_description: &'static str,
    pub socials: &'static [SocialLink],
}

pub const SITE: SiteConfig = SiteConfig {
    owner: "Ivan Petrov",
    role: "Senior C# Developer",
    domain: "ivanpetrov.dev",
    base_url: "https://ivanpetrov.dev",
    email: "contact@example.com",
    phone: "+7 (999) 123-45-67",
    phone_href: "tel:+79991234567",
    location: "Moscow, Russia",
    blog_title: "Ivan Petrov's Blog",
    blog_description: "Articles on C# and .NET development, best practices, architecture and performance.",
    socials: &[
        SocialLink {
            label: "GitHub",
            href: "https://github.com/ivan-petrov",
        },
        SocialLink {
            label: "LinkedIn",
            href: "https://linkedin.com/in/ivan-petrov",
        },
        SocialLink {
            label: "Twitter",
            href: "https://twitter.com/ivan_petrov_dev",
        },
        SocialLink {
            label: "StackOverflow",
            href: "https://stackoverflow.com/users/ivan-petrov",
        },
    ],
};

impl SiteConfig {
    pub fn social(&self, label: &str) -> Option<&'static SocialLink> {
        self.socials.iter().find(|s| s.label == label)
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_social_lookup() {
        assert!(SITE.social("GitHub").is_some());
        assert!(SITE.social("MySpace").is_none());
    }

    #[test]
    fn test_url_join() {
        assert_eq!(SITE.url("/rss.xml"), "https://ivanpetrov.dev/rss.xml");
    }
}
