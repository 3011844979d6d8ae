//! # Bit Operations
//!
//! Fixed-width circular shifts, big-endian byte splitting, and the six
//! SHA-256 round sub-functions (FIPS 180-4 §4.1.2).
//!
//! Every function here is pure and total. Shift amounts of any size are
//! accepted and reduced modulo the word width, so a shift by `0` or by a
//! multiple of the width is the identity.

/// Circular (rotating) shifts over a fixed-width unsigned integer.
///
/// The width is carried by the implementing type: 16, 32, or 64 bits.
pub trait CircularShift: Copy {
    /// Width of the value in bits.
    const WIDTH: u32;

    /// Rotate left by `amount mod WIDTH` positions.
    fn circular_left_shift(self, amount: u32) -> Self;

    /// Rotate right by `amount mod WIDTH` positions.
    fn circular_right_shift(self, amount: u32) -> Self;
}

/// Split a fixed-width unsigned integer into bytes, most-significant first.
pub trait SplitToBytes: Copy {
    /// Byte array of exactly `WIDTH / 8` bytes.
    type Bytes: AsRef<[u8]>;

    /// Big-endian byte representation of `self`.
    fn split_to_bytes(self) -> Self::Bytes;
}

macro_rules! impl_fixed_width {
    ($($ty:ty),* $(,)?) => {$(
        impl CircularShift for $ty {
            const WIDTH: u32 = <$ty>::BITS;

            #[inline]
            fn circular_left_shift(self, amount: u32) -> Self {
                self.rotate_left(amount % Self::WIDTH)
            }

            #[inline]
            fn circular_right_shift(self, amount: u32) -> Self {
                self.rotate_right(amount % Self::WIDTH)
            }
        }

        impl SplitToBytes for $ty {
            type Bytes = [u8; std::mem::size_of::<$ty>()];

            #[inline]
            fn split_to_bytes(self) -> Self::Bytes {
                self.to_be_bytes()
            }
        }
    )*};
}

impl_fixed_width!(u16, u32, u64);

/// Rotate `value` left by `amount` positions within its own width.
#[inline]
pub fn rotl<T: CircularShift>(value: T, amount: u32) -> T {
    value.circular_left_shift(amount)
}

/// Rotate `value` right by `amount` positions within its own width.
#[inline]
pub fn rotr<T: CircularShift>(value: T, amount: u32) -> T {
    value.circular_right_shift(amount)
}

/// `CH(x, y, z) = (x AND y) XOR ((NOT x) AND z)`
#[inline]
pub fn ch(x: u32, y: u32, z: u32) -> u32 {
    (x & y) ^ (!x & z)
}

/// `MAJ(x, y, z) = (x AND y) XOR (x AND z) XOR (y AND z)`
#[inline]
pub fn maj(x: u32, y: u32, z: u32) -> u32 {
    (x & y) ^ (x & z) ^ (y & z)
}

/// `BSIG0(x) = ROTR^2(x) XOR ROTR^13(x) XOR ROTR^22(x)`
#[inline]
pub fn bsig0(x: u32) -> u32 {
    rotr(x, 2) ^ rotr(x, 13) ^ rotr(x, 22)
}

/// `BSIG1(x) = ROTR^6(x) XOR ROTR^11(x) XOR ROTR^25(x)`
#[inline]
pub fn bsig1(x: u32) -> u32 {
    rotr(x, 6) ^ rotr(x, 11) ^ rotr(x, 25)
}

/// `SSIG0(x) = ROTR^7(x) XOR ROTR^18(x) XOR SHR^3(x)`
#[inline]
pub fn ssig0(x: u32) -> u32 {
    rotr(x, 7) ^ rotr(x, 18) ^ (x >> 3)
}

/// `SSIG1(x) = ROTR^17(x) XOR ROTR^19(x) XOR SHR^10(x)`
#[inline]
pub fn ssig1(x: u32) -> u32 {
    rotr(x, 17) ^ rotr(x, 19) ^ (x >> 10)
}
