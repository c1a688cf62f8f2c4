// tests/support/mocks/mod.rs
#![allow(dead_code)]

pub mod memory;
pub mod notify;
pub mod time;
pub mod util;

pub use memory::{
    InMemoryArticleReadRepo, InMemoryArticleWriteRepo, InMemoryCategoryRepo, InMemoryStore,
    InMemoryUserRepo,
};
pub use notify::CapturingNotifier;
pub use time::fixed_now;
pub use util::SteppingClock;
