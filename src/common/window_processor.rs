use alloc::{boxed::Box, vec};

/// Collects chunks of arbitrary size into fixed size, possibly overlapping,
/// windows and hands each newly filled window to a handler.
///
/// Consecutive windows start `hop_size` samples apart. The first window is
/// handed over once `window_size` samples have been collected.
pub struct WindowProcessor {
    window: Box<[f32]>,
    hop_size: usize,
    // Number of samples written during the initial fill.
    fill_count: usize,
    // Number of samples written since the previous window was handed over.
    hop_write_index: usize,
    has_filled_first_window: bool,
}

fn validate_sizes(window_size: usize, hop_size: usize) {
    if hop_size == 0 {
        panic!("Hop size must be greater than 0")
    }
    if window_size > 0 && hop_size > window_size {
        panic!("Hop size must not be greater than window size")
    }
}

impl WindowProcessor {
    pub fn new(window_size: usize, hop_size: usize) -> Self {
        validate_sizes(window_size, hop_size);
        WindowProcessor {
            window: vec![0.; window_size].into_boxed_slice(),
            hop_size,
            fill_count: 0,
            hop_write_index: 0,
            has_filled_first_window: false,
        }
    }

    pub fn reset(&mut self) {
        self.fill_count = 0;
        self.hop_write_index = 0;
        self.has_filled_first_window = false;
    }

    pub fn hop_size(&self) -> usize {
        self.hop_size
    }

    pub fn window_size(&self) -> usize {
        self.window.len()
    }

    pub fn process<F>(&mut self, buffer: &[f32], mut handler: F)
    where
        F: FnMut(&[f32]),
    {
        let window_size = self.window.len();
        if window_size == 0 {
            return;
        }
        for input in buffer.iter() {
            if !self.has_filled_first_window {
                self.window[self.fill_count] = *input;
                self.fill_count += 1;
                if self.fill_count == window_size {
                    self.has_filled_first_window = true;
                    handler(&self.window);
                }
                continue;
            }

            // Make room for the next hop once the previous window has been handed over.
            if self.hop_write_index == 0 {
                self.window.copy_within(self.hop_size.., 0);
            }
            self.window[window_size - self.hop_size + self.hop_write_index] = *input;
            self.hop_write_index += 1;
            if self.hop_write_index == self.hop_size {
                self.hop_write_index = 0;
                handler(&self.window);
            }
        }
    }
}
