//! Growable GPU buffers for per-frame instance data.
//!
//! Buffers grow by doubling and never shrink, since GPU buffers cannot be
//! resized in place.

use std::marker::PhantomData;

/// A typed GPU buffer that reallocates when written past its capacity.
pub struct TypedBuffer<T> {
    buffer: wgpu::Buffer,
    capacity: usize,
    count: usize,
    usage: wgpu::BufferUsages,
    label: String,
    _marker: PhantomData<T>,
}

impl<T: bytemuck::Pod> TypedBuffer<T> {
    /// Buffer with room for `capacity` items (at least one).
    #[must_use]
    pub fn with_capacity(
        device: &wgpu::Device,
        label: &str,
        capacity: usize,
        usage: wgpu::BufferUsages,
    ) -> Self {
        let capacity = capacity.max(1);
        Self {
            buffer: Self::allocate(device, label, capacity, usage),
            capacity,
            count: 0,
            usage,
            label: label.to_owned(),
            _marker: PhantomData,
        }
    }

    fn allocate(
        device: &wgpu::Device,
        label: &str,
        capacity: usize,
        usage: wgpu::BufferUsages,
    ) -> wgpu::Buffer {
        device.create_buffer(&wgpu::BufferDescriptor {
            label: Some(label),
            size: (capacity * size_of::<T>()) as u64,
            usage: usage | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        })
    }

    /// Write `data`, growing the buffer first if needed.
    ///
    /// Returns `true` if the buffer was reallocated (bind groups that
    /// reference it need recreation).
    pub fn write(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        data: &[T],
    ) -> bool {
        let reallocated = data.len() > self.capacity;
        if reallocated {
            self.capacity = grown_capacity(self.capacity, data.len());
            self.buffer =
                Self::allocate(device, &self.label, self.capacity, self.usage);
            log::debug!(
                "{} grown to {} items",
                self.label,
                self.capacity
            );
        }
        if !data.is_empty() {
            queue.write_buffer(&self.buffer, 0, bytemuck::cast_slice(data));
        }
        self.count = data.len();
        reallocated
    }

    /// The underlying GPU buffer.
    #[must_use]
    pub fn buffer(&self) -> &wgpu::Buffer {
        &self.buffer
    }

    /// Items written by the last [`write`](Self::write).
    #[must_use]
    pub fn count(&self) -> usize {
        self.count
    }

    /// Whether the last write was empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Items the buffer holds without reallocating.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

/// 2x growth, at least enough for `needed`.
fn grown_capacity(current: usize, needed: usize) -> usize {
    (current * 2).max(needed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn growth_doubles() {
        assert_eq!(grown_capacity(4, 5), 8);
        assert_eq!(grown_capacity(8, 9), 16);
    }

    #[test]
    fn growth_covers_large_writes() {
        assert_eq!(grown_capacity(4, 100), 100);
        assert_eq!(grown_capacity(1, 2), 2);
    }
}
