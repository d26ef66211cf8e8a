//! Pieces of UI shared between the pages: the layout chrome, the chat widget
//! and a few presentational helpers.

mod carousel;
mod chat;
mod footer;
mod layout;
mod modal;
mod motion;
mod navbar;

pub use carousel::CarouselControls;
pub use chat::ChatWidget;
pub use footer::Footer;
pub use layout::Layout;
pub use modal::Modal;
pub use motion::{Motion, Reveal};
pub use navbar::Navbar;
