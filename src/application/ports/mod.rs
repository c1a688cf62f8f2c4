// src/application/ports/mod.rs
pub mod auth;
pub mod notify;
pub mod time;
pub mod util;

// Type aliases to make port injection sites more descriptive and reduce `dyn` noise
pub type PrincipalResolverPort = dyn auth::PrincipalResolver;
pub type PublicationNotifierPort = dyn notify::PublicationNotifier;
pub type ClockPort = dyn time::Clock;
pub type SlugGeneratorPort = dyn util::SlugGenerator;
