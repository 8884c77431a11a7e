pub mod app;
pub mod carousel;
pub mod chrome;
pub mod events;
pub mod facts;
pub mod input;
pub mod layout;
pub mod like_bar;
pub mod likes;
pub mod mvi;
pub mod panels;
pub mod render;
pub mod runtime;
pub mod slides;
pub mod terminal_guard;
pub mod theme;
pub mod view;
