pub mod booking;
pub mod photo;
pub mod room;
pub mod user;

pub use booking::{
    AvailabilityResult, Booking, BookingRequest, DateRange, ExperienceBooking, MyBooking,
};
pub use photo::{Photo, UploadTarget, UploadedImage};
pub use room::{Amenity, Category, Review, RoomDetail, RoomFields, RoomKind, RoomOwner, RoomSummary};
pub use user::{SignUpFields, User};
