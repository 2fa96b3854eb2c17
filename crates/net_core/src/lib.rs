//! net_core: message taxonomy, wire codec, framing and the transport seam.
//!
//! The crate is deliberately free of simulation types: ids and teams cross
//! the wire as plain integers and the neighbouring crates convert at the
//! boundary. Real sockets are an external collaborator behind [`transport`].

#![deny(warnings, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]

pub mod channel;
pub mod frame;
pub mod message;
pub mod transport;
pub mod wire;
