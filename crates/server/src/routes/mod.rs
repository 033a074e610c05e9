pub mod secured;
