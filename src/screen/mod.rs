//! Screen state controller and its render model.

mod controller;
mod view;

pub use controller::ScreenController;
pub use view::{
    view, CardDetail, CardView, View, CONTINUE_LABEL, SHOW_LESS, SHOW_MORE, WELCOME_HEADLINE,
};
