use std::collections::HashSet;

/// The keys a lab reacts to. Window loops map their own key codes onto these and drop
/// the rest.
#[rustfmt::skip]
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Serialize, Deserialize)]
pub enum Key {
    Key0, Key1, Key2, Key3, Key4, Key5, Key6, Key7, Key8, Key9,

    A, B, C, D, E, F, G, H, I, J, K, L, M,
    N, O, P, Q, R, S, T, U, V, W, X, Y, Z,

    Escape, Return, Space, Tab,
    Left, Up, Right, Down,

    LAlt, LControl, LShift,
    RAlt, RControl, RShift,
}

/// Held, pressed and released keys of the current frame.
#[derive(Debug, Default)]
pub struct Keyboard {
    downs: HashSet<Key>,
    presses: HashSet<Key>,
    releases: HashSet<Key>,
}

impl Keyboard {
    pub fn new() -> Self {
        Keyboard::default()
    }

    #[inline]
    pub fn reset(&mut self) {
        self.downs.clear();
        self.presses.clear();
        self.releases.clear();
    }

    /// Forgets the per-frame press/release events, keeping held keys.
    #[inline]
    pub fn advance(&mut self) {
        self.presses.clear();
        self.releases.clear();
    }

    #[inline]
    pub fn on_key_pressed(&mut self, key: Key) {
        if self.downs.insert(key) {
            self.presses.insert(key);
        }
    }

    #[inline]
    pub fn on_key_released(&mut self, key: Key) {
        if self.downs.remove(&key) {
            self.releases.insert(key);
        }
    }

    #[inline]
    pub fn is_key_down(&self, key: Key) -> bool {
        self.downs.contains(&key)
    }

    #[inline]
    pub fn is_key_press(&self, key: Key) -> bool {
        self.presses.contains(&key)
    }

    #[inline]
    pub fn is_key_release(&self, key: Key) -> bool {
        self.releases.contains(&key)
    }
}
