use anyhow::Result;

use sound_garden::app::App;
use sound_garden::audio::HeadlessAudio;
use sound_garden::garden_core::config::GardenConfig;
use sound_garden::garden_core::save::FileStore;
use sound_garden::garden_runtime::GardenRuntime;
use sound_garden::scene::HeadlessScene;

fn main() -> Result<()> {
    env_logger::init();

    let config = GardenConfig::load();
    let scene = HeadlessScene::new(config.ground_half_extent);
    let runtime = GardenRuntime::new(
        config,
        Box::new(scene),
        Box::new(HeadlessAudio::new()),
        Box::new(FileStore::new(".")),
    );

    App::new(runtime).run()
}
