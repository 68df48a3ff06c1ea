/// Game tuning parameters shared by Pong and Tic-Tac-Toe
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Pong screen (logical pixels)
    pub const SCREEN_WIDTH: f32 = 720.0;
    pub const SCREEN_HEIGHT: f32 = 480.0;

    // Paddle
    pub const PADDLE_WIDTH: f32 = 10.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;

    // Ball
    pub const BALL_RADIUS: f32 = 10.0;
    pub const BALL_SPREAD: f32 = 0.5; // vy = speed * U(-spread, spread)

    // Speed (pixels per second, shared by paddles and ball serve)
    pub const SPEED_INITIAL: f32 = 300.0;
    pub const SPEED_STEP: f32 = 30.0;

    // Overlays
    pub const FADE_DURATION: f32 = 1.0; // seconds

    // Tic-Tac-Toe screen (square)
    pub const GRID_SCREEN: f32 = 720.0;
    pub const GRID_CELLS: usize = 3;

    // Frame pacing
    pub const TARGET_FPS: u32 = 60;
}
