// tests/cipher/mod.rs

#[cfg(test)]
mod affine;
#[cfg(test)]
mod enigma;
#[cfg(test)]
mod playfair;
#[cfg(test)]
mod util;
