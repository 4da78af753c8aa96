pub mod util;

#[cfg(test)]
mod regression;
#[cfg(test)]
mod session;
#[cfg(test)]
mod spatial_index;
#[cfg(all(test, feature = "ffi"))]
mod ffi;
