/// Logical keys understood by the apps, independent of any windowing library.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Key {
    Left,
    Right,
    Up,
    Down,
    A,
    D,
    P,
    Space,
    Escape,
    None,
}
