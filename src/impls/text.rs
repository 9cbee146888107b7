use allocator_api2::alloc::Global;

use crate::kind::{Container, ContainerKind};
use crate::ops::Text;

impl Container for ::alloc::string::String {
    const KIND: ContainerKind = ContainerKind::Text;

    type Alloc = Global;

    #[inline]
    fn size(&self) -> u32 {
        Self::len(self) as u32
    }

    #[inline]
    fn allocator(&self) -> Global {
        Global
    }
}

impl Text for ::alloc::string::String {
    #[inline]
    fn as_bytes(&self) -> &[u8] {
        Self::as_bytes(self)
    }

    #[inline]
    fn clear(&mut self) {
        Self::clear(self)
    }

    #[inline]
    fn push_str(&mut self, fragment: &str) {
        Self::push_str(self, fragment)
    }
}
