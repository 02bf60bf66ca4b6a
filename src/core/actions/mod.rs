pub mod derive_draw_color;
