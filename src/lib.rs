//! Book library application: seller and book modules mounted on the
//! service kernel.

pub mod modules;
