//! View layer
//!
//! A typed stand-in for the page DOM: render functions build [`Node`] trees,
//! the [`Document`] holds what is mounted where, and elements carry typed
//! [`Action`] bindings that the handlers dispatch.

pub mod action;
pub mod document;
pub mod form;
pub mod ids;
pub mod node;
pub mod render;

pub use action::{Action, ChangeAction};
pub use document::Document;
pub use form::FormData;
pub use ids::{FormId, ModalId};
pub use node::{el, Element, Node};
