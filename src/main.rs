use chomp::animation::{AnimationClock, FeedingDriver, RestPose};
use chomp::app::App;
use chomp::character::build_tomato;
use chomp::viewport;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut app = App::new().with_title("Chomp");

    let rig = build_tomato(&mut app.scene, &RestPose::DEFAULT);
    let stage = viewport::setup_stage(&mut app.scene, App::initial_aspect());
    let mut controls = viewport::orbit_controls();

    let driver = FeedingDriver::default();
    let mut clock: Option<AnimationClock> = None;

    app.set_update_fn(move |scene, input, timer| {
        let now = timer.now();
        let clock = clock.get_or_insert_with(|| AnimationClock::started_at(now));

        let update = driver.tick(now, clock);
        rig.apply(&update, scene);

        let fov = scene
            .main_camera()
            .map_or(viewport::CAMERA_FOV_DEGREES, |camera| camera.fov_degrees());
        if let Some(node) = scene.get_node_mut(stage.camera) {
            controls.update(&mut node.transform, input, fov, timer.dt_seconds());
        }
    });

    app.run()?;
    Ok(())
}
