use drip::engine::{Painting, StrokeRenderer, Surface};
use drip::{export, replay, BrushConfig, Color};

const SCRIPT: &str = "
# a quick diagonal, a pause, and a hook back
color #2c3e50
down 20 20
move 30 30
move 60 60
move 60 60
move 100 40
up
color rgb(192 57 43)
down 150 150
move 152 150
move 154 151
up
";

fn painting(seed: u64) -> Painting {
	Painting::with_renderer(
		Surface::new(200, 200),
		StrokeRenderer::with_seed(BrushConfig::default(), seed).unwrap(),
	)
}

#[test]
fn replay_paints_every_gesture() -> anyhow::Result<()> {
	let commands = replay::parse_script(SCRIPT)?;
	let mut painting = painting(11);
	let summary = replay::replay(&mut painting, &commands);

	assert_eq!(summary.gestures, 2);
	assert_eq!(summary.segments, 6);
	assert_eq!(summary.dwells, 1);
	assert!(summary.blots >= 1);
	assert_eq!(painting.color(), Color::rgb(192, 57, 43));

	let surface = painting.surface();
	assert_eq!(surface.pixel(40, 40), Some(Color::rgb(0x2c, 0x3e, 0x50)));
	assert_eq!(surface.pixel(153, 150), Some(Color::rgb(192, 57, 43)));
	Ok(())
}

#[test]
fn same_seed_same_painting() -> anyhow::Result<()> {
	let commands = replay::parse_script(SCRIPT)?;
	let mut first = painting(5);
	let mut second = painting(5);
	replay::replay(&mut first, &commands);
	replay::replay(&mut second, &commands);
	assert_eq!(first.surface().snapshot(), second.surface().snapshot());
	Ok(())
}

#[test]
fn export_round_trip() -> anyhow::Result<()> {
	let mut painting = painting(1);
	replay::replay(&mut painting, &replay::parse_script(SCRIPT)?);

	let png_data = export::encode_png(painting.surface())?;
	let mut reader = png::Decoder::new(png_data.as_slice()).read_info()?;
	let mut decoded = vec![0; reader.output_buffer_size()];
	let info = reader.next_frame(&mut decoded)?;
	assert_eq!((info.width, info.height), (200, 200));
	assert_eq!(&decoded[..info.buffer_size()], painting.surface().as_bytes());

	let url = export::surface_data_url(painting.surface())?;
	let document = export::print_document(&url);
	assert!(document.contains(&url));
	Ok(())
}

#[test]
fn cli_writes_a_png() -> anyhow::Result<()> {
	let dir = tempfile::tempdir()?;
	let script = dir.path().join("gesture.txt");
	let output = dir.path().join("out.png");
	std::fs::write(&script, SCRIPT)?;

	assert_cmd::Command::cargo_bin("drip")?
		.arg(&script)
		.args(["--output".as_ref(), output.as_os_str()])
		.args(["--width", "200", "--height", "120", "--seed", "9", "--background", "white"])
		.assert()
		.success();

	let mut reader = png::Decoder::new(std::fs::File::open(&output)?).read_info()?;
	let mut decoded = vec![0; reader.output_buffer_size()];
	let info = reader.next_frame(&mut decoded)?;
	assert_eq!((info.width, info.height), (200, 120));
	// The white background is opaque everywhere.
	assert!(decoded[..info.buffer_size()].chunks_exact(4).all(|p| p[3] == 255));
	Ok(())
}

#[test]
fn cli_rejects_bad_scripts() -> anyhow::Result<()> {
	let dir = tempfile::tempdir()?;
	let output = dir.path().join("out.png");

	let result = assert_cmd::Command::cargo_bin("drip")?
		.args(["--output".as_ref(), output.as_os_str()])
		.write_stdin("down 1 1\nsmear 2 2\n")
		.output()?;
	assert!(!result.status.success());
	let stderr = String::from_utf8_lossy(&result.stderr);
	assert!(stderr.contains("line 2: unknown command `smear`"), "{stderr}");
	assert!(!output.exists());
	Ok(())
}

#[test]
fn cli_rejects_oversized_surfaces() -> anyhow::Result<()> {
	let dir = tempfile::tempdir()?;
	let output = dir.path().join("out.png");

	for args in [["--width", "100000"], ["--height", "0"]] {
		let result = assert_cmd::Command::cargo_bin("drip")?
			.args(["--output".as_ref(), output.as_os_str()])
			.args(args)
			.write_stdin("down 1 1\nup\n")
			.output()?;
		assert!(!result.status.success());
		let stderr = String::from_utf8_lossy(&result.stderr);
		assert!(stderr.contains(args[0]), "{stderr}");
	}
	assert!(!output.exists());
	Ok(())
}
