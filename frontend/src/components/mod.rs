pub mod alert;
pub mod context;
pub mod field;
pub mod layout;
pub mod map_view;
pub mod protected_route;
pub mod stat_card;
pub mod toast;
