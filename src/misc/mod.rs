/*!
Items without a better home.
*/

pub mod log;
