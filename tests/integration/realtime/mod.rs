pub mod broadcast_test;
pub mod pusher_test;
