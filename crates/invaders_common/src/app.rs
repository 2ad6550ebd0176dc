use crate::key::Key;

/// A frame-driven application a frontend can host.
///
/// The frontend owns the window and the frame loop. Once per presented frame
/// it forwards the pending key edges, calls `update` with an RGB24 buffer of
/// `width * height * 3` bytes, and presents whatever the app painted.
pub trait App {
    fn init(&mut self);
    fn update(&mut self, screen: &mut [u8]);
    fn handle_key_event(&mut self, key: Key, is_down: bool);
    fn should_exit(&self) -> bool;
    fn exit(&mut self);

    fn width(&self) -> u32;
    fn height(&self) -> u32;
    fn scale(&self) -> u32;
    fn title(&self) -> String;
}
