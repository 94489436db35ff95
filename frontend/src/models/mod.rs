pub mod conference;

pub use conference::{ConferenceBuilder, ConferenceDescriptor, DefaultServerBuilder};
