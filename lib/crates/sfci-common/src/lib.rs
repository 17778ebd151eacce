pub mod ci;
pub mod envelope;
pub mod project;
pub mod sf;

pub use ci::{GithubVariableResponse, GitlabVariableResponse, TestCredentials};
pub use envelope::{Envelope, EnvelopeError, parse_envelope};
pub use project::{PackageDirectory, SfdxProject};
pub use sf::*;
