//! End-to-end rendering of scenes read from scene file text.

use prism_core::parse_scene;
use prism_renderer::{render, write_ppm, Camera, RenderConfig, World};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// One white light at the eye, a unit diffuse sphere at the origin.
const LIT_SPHERE: &str = "\
4 4         world size
0 0 5       viewpoint
10          light
1 1 1       emissivity
0 0 5       center
13          sphere
0 0 0       ambient
1 1 1       diffuse
0 0 0       specular
0 0 0       center
1           radius
";

fn render_text(text: &str, width: u32, height: u32) -> image::RgbImage {
    let scene = parse_scene(text).unwrap();
    let world = World::from_scene(&scene);
    let camera = Camera::new(&scene.projection, width, height);
    let mut rng = StdRng::seed_from_u64(0);

    render(&camera, &world, &RenderConfig::default(), &mut rng)
}

#[test]
fn test_lit_sphere_is_a_centered_disc() {
    let image = render_text(LIT_SPHERE, 41, 41);

    // Center: hit at distance 4, light 4 away head on: 1 / 4 / 4 = 0.0625
    let center = image.get_pixel(20, 20).0;
    assert_eq!(center, [15, 15, 15]);

    // Inside the projected radius (about 1.02 world units, or 10 pixels)
    assert_ne!(image.get_pixel(29, 20).0, [0, 0, 0]);
    assert_ne!(image.get_pixel(11, 20).0, [0, 0, 0]);
    assert_ne!(image.get_pixel(20, 29).0, [0, 0, 0]);

    // Outside it and in the corners
    for (x, y) in [(32, 20), (8, 20), (20, 32), (0, 0), (40, 0), (0, 40), (40, 40)] {
        assert_eq!(image.get_pixel(x, y).0, [0, 0, 0], "pixel ({x}, {y})");
    }
}

#[test]
fn test_lit_sphere_is_symmetric() {
    let image = render_text(LIT_SPHERE, 41, 41);

    // Mirrored view plane coordinates may differ in the last bit
    for y in 0..41 {
        for x in 0..41 {
            let a = image.get_pixel(x, y).0;
            let b = image.get_pixel(40 - x, y).0;
            for (ca, cb) in a.iter().zip(b.iter()) {
                assert!(ca.abs_diff(*cb) <= 1, "pixel ({x}, {y}): {a:?} vs {b:?}");
            }
        }
    }
}

#[test]
fn test_shadowed_floor() {
    // A floor below a sphere, lit from straight above the sphere
    let text = "\
4 4
0 0 5
10
4 4 4
0 6 -3
13 blocker
0 0 0
1 1 1
0 0 0
0 0 -3
0.5
14 floor
0 0 0
1 1 1
0 0 0
0 1 0
0 -1 0
";
    let image = render_text(text, 41, 41);

    // Row 26 looks at the floor just beyond z = -3. Floor hits in front of
    // the view plane are culled, so lower rows are black.
    assert_eq!(image.get_pixel(20, 40).0, [0, 0, 0]);

    // Off to the side the floor is lit
    assert_ne!(image.get_pixel(2, 26).0, [0, 0, 0]);

    // Straight ahead it lies in the sphere's shadow
    assert_eq!(image.get_pixel(20, 26).0, [0, 0, 0]);
}

#[test]
fn test_ppm_output() {
    let image = render_text(LIT_SPHERE, 8, 6);

    let mut buf = Vec::new();
    write_ppm(&image, &mut buf).unwrap();

    // Magic, width, height and max value, each followed by one whitespace byte
    let mut fields = Vec::new();
    let mut pos = 0;
    while fields.len() < 4 {
        while buf[pos].is_ascii_whitespace() {
            pos += 1;
        }
        let start = pos;
        while !buf[pos].is_ascii_whitespace() {
            pos += 1;
        }
        fields.push(std::str::from_utf8(&buf[start..pos]).unwrap().to_string());
        pos += 1;
    }

    assert_eq!(fields, ["P6", "8", "6", "255"]);
    assert_eq!(buf.len() - pos, 8 * 6 * 3);
}
