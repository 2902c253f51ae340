pub mod animation;
pub mod app;
pub mod config;
pub mod content;
pub mod filter;
pub mod components {
    pub mod about;
    pub mod footer;
    pub mod hero;
    pub mod projects;
    pub mod services;
}
pub mod pages {
    pub mod home;
}
pub mod utils {
    pub mod events;
    pub mod particles;
    pub mod scroll;
    pub mod typewriter;
}
