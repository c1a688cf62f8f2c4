// tests/support/mod.rs
#![allow(dead_code)]

pub mod builders;
pub mod mocks;

pub use builders::{ArticleBuilder, actor, user};
pub use mocks::{
    CapturingNotifier, InMemoryArticleReadRepo, InMemoryArticleWriteRepo, InMemoryCategoryRepo,
    InMemoryStore, InMemoryUserRepo, SteppingClock,
};
