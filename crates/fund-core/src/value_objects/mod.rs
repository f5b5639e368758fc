//! Value objects - immutable types that represent domain concepts

mod gradient;
mod ids;
mod payment;
mod theme;
mod time_ago;

pub use gradient::{initials_of, AvatarGradient, AVATAR_PALETTE};
pub use ids::{CheerId, PledgeId, TierId};
pub use payment::{PaymentId, PaymentMethod};
pub use theme::ThemeMode;
pub use time_ago::time_ago;
