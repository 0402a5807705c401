pub mod database;
pub mod io;
pub mod log;
pub mod rolling;
pub mod string;
pub mod theme;
