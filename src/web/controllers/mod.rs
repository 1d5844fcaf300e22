//! Controllers - turn form input and service results into views.

mod owner;
mod pet;
mod vet;
mod visit;

pub use owner::{OwnerController, OwnerDetails, PetDetails};
pub use pet::PetController;
pub use vet::{VetController, VetDetails};
pub use visit::VisitController;

use super::view::View;

/// Landing page view
pub const INDEX_VIEW: &str = "index";

/// The landing page
#[must_use]
pub const fn index() -> View {
    View::template(INDEX_VIEW)
}
