use std::collections::HashMap;

/// Classifies a value as absent or zero.
///
/// Implemented for a closed set of shapes: strings (whitespace-only counts
/// as empty), integer and float numerics (zero), booleans (`false`),
/// sequences and maps (length zero), and `Option` (either `None` or an
/// empty inner value).
pub trait IsEmpty {
    fn is_empty_value(&self) -> bool;
}

impl IsEmpty for str {
    fn is_empty_value(&self) -> bool {
        self.trim().is_empty()
    }
}

impl IsEmpty for String {
    fn is_empty_value(&self) -> bool {
        self.as_str().is_empty_value()
    }
}

impl IsEmpty for bool {
    fn is_empty_value(&self) -> bool {
        !*self
    }
}

macro_rules! impl_is_empty_integer {
    ($($ty:ty),*) => {
        $(impl IsEmpty for $ty {
            fn is_empty_value(&self) -> bool {
                *self == 0
            }
        })*
    };
}

impl_is_empty_integer!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl IsEmpty for f32 {
    fn is_empty_value(&self) -> bool {
        *self == 0.0
    }
}

impl IsEmpty for f64 {
    fn is_empty_value(&self) -> bool {
        *self == 0.0
    }
}

impl<T> IsEmpty for [T] {
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl<T> IsEmpty for Vec<T> {
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl<K, V> IsEmpty for HashMap<K, V> {
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl<T: IsEmpty> IsEmpty for Option<T> {
    fn is_empty_value(&self) -> bool {
        match self {
            Some(value) => value.is_empty_value(),
            None => true,
        }
    }
}

impl<T: IsEmpty + ?Sized> IsEmpty for &T {
    fn is_empty_value(&self) -> bool {
        (**self).is_empty_value()
    }
}

/// Returns `true` when `value` is absent or zero per [`IsEmpty`].
pub fn is_empty<T: IsEmpty + ?Sized>(value: &T) -> bool {
    value.is_empty_value()
}
