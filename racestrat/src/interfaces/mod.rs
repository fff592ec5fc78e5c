pub mod driver_interface;
