pub mod beam;
pub mod ping;

pub use beam::Beam;
pub use ping::SonarPing;
