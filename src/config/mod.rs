#[cfg(feature = "cli")]
pub mod cli;
pub mod site;

#[cfg(feature = "cli")]
pub use cli::CliConfig;
pub use site::SiteConfig;
