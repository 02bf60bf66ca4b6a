pub mod draw_color;
pub mod frame_buffer;
pub mod input_event;
pub mod loop_state;
pub mod point;
pub mod rect;
pub mod window_size;
