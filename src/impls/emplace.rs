// Emplace for element types that never carry an allocator: construction is
// plain default construction for every allocator handle.

macro_rules! impl_emplace_opaque {
    ($($ty:ty),* $(,)?) => {
        $(
            impl<A: $crate::policy::StorageAlloc> $crate::policy::Emplace<A> for $ty {
                const POLICY: $crate::policy::AllocPolicy =
                    $crate::policy::AllocPolicy::UseDefault;

                #[inline]
                fn emplace(_alloc: &A) -> Self {
                    <$ty as ::core::default::Default>::default()
                }
            }
        )*
    };
}

impl_emplace_opaque!(
    u8,
    u16,
    u32,
    u64,
    u128,
    usize,
    i8,
    i16,
    i32,
    i64,
    i128,
    isize,
    f32,
    f64,
    bool,
    char,
    (),
    ::alloc::string::String,
);
