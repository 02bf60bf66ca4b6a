use canvas_explorer::{
    BufferCanvas, InputEvent, Point, RenderLoop, ScriptedEventSource, WindowSize,
};
use criterion::{BatchSize, Criterion, criterion_group, criterion_main};

fn bench_empty_frame(c: &mut Criterion) {
    let window = WindowSize::new(800, 600).unwrap();

    c.bench_function("frame_no_events", |b| {
        let mut render_loop = RenderLoop::new(window);
        let mut events = ScriptedEventSource::new([]);
        let mut canvas = BufferCanvas::new(window);

        b.iter(|| render_loop.run_frame(&mut events, &mut canvas));
    });
}

fn bench_pointer_heavy_frame(c: &mut Criterion) {
    let window = WindowSize::new(800, 600).unwrap();
    let moves: Vec<InputEvent> = (0..64)
        .map(|i| InputEvent::PointerMoved(Point { x: i * 12, y: i * 9 }))
        .collect();

    c.bench_function("frame_64_pointer_moves", |b| {
        let mut render_loop = RenderLoop::new(window);
        let mut canvas = BufferCanvas::new(window);

        b.iter_batched(
            || ScriptedEventSource::new(moves.clone()),
            |mut events| render_loop.run_frame(&mut events, &mut canvas),
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(benches, bench_empty_frame, bench_pointer_heavy_frame);
criterion_main!(benches);
