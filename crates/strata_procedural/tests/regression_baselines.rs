//! # Regression Baselines
//!
//! Fixed outputs for fixed seeds. Any change to the permutation shuffle, the
//! noise kernels, octave stacking, normalization or the erosion step shows
//! up here.

#![allow(clippy::unreadable_literal, clippy::cast_precision_loss)]

use strata_core::Grid;
use strata_procedural::{
    ErosionParams, FractalParams, HydraulicErosion, NoiseSource, PerlinNoise, Seed, SimplexNoise,
};

const PERLIN_SEED_42: [[f64; 10]; 10] = [
    [0.42522867186553304, 0.5144796571998689, 0.42685585482513805, 0.49473480897441163, 0.31974653650913687, 0.42522867186553304, 0.6746173426853733, 0.47759345348432236, 0.39954460583751744, 0.3920061722824722],
    [0.49778831949704544, 0.4961035651771466, 0.2984910043016589, 0.26139736323446466, 0.12972763496475198, 0.3501824852738742, 0.49622646061094533, 0.45042877218819666, 0.4199056576730877, 0.6146142022059894],
    [0.3850677624437813, 0.3070047916624785, 0.26937148560363333, 0.1418038953381828, 0.07955437915398379, 0.00807998038378862, 0.36918751849491754, 0.33227211579475224, 0.2938106118482677, 0.4581922492145128],
    [0.48833794596446434, 0.1538957685321109, 0.20872259024440692, 0.14473524591371567, 0.03482184306940977, 0.18112071824428605, 0.3907887221280105, 0.36605605289105486, 0.37759159873982584, 0.35496841925479994],
    [0.2383136568010283, 0.17209522577661057, 0.09650891288693206, 0.200454724739413, 0.33992823698453395, 0.2542727621720297, 0.48942724488416783, 0.6335439025511435, 0.5073510646576338, 0.36217060765511494],
    [0.42522867186553304, 0.22658776959837465, 0.0, 0.301796674485994, 0.365839036313324, 0.42522867186553304, 0.5494056139437662, 0.5577220443513728, 0.5584288519494509, 0.4955661977678349],
    [0.6656068170465604, 0.37378408417737025, 0.16837547495426436, 0.2368025473106639, 0.6183586853957304, 0.7196242063586986, 0.7377079513685749, 0.5520886433821998, 0.47441968193710143, 0.5539624641581326],
    [0.6028204370661757, 0.5361820203567863, 0.348565765914291, 0.3532333044358929, 0.5538412463499653, 0.7744323048902698, 0.8647893092628106, 0.6768765568637396, 0.7856794374409996, 0.5922981990657117],
    [0.22735305408406373, 0.3045901050338707, 0.3786565867325215, 0.35088546980558905, 0.522850111708917, 0.7201962628679345, 0.8037418639133308, 0.7748290039599068, 0.8358765493811385, 0.47852204693338635],
    [0.40550670590044524, 0.5315941145420446, 0.5129416088820166, 0.3521990645059934, 0.27783940837196186, 0.6603998315758244, 0.873352990121129, 1.0, 0.6842611060991118, 0.5209633719138765],
];

const SIMPLEX_SEED_42: [[f64; 10]; 10] = [
    [0.5213613208947843, 0.6327043748716502, 0.7310626666627412, 0.7274546331443303, 0.6668036838716374, 0.616938949872952, 0.2533282144700718, 0.41862427815611364, 0.3421479931983703, 0.7482678536587872],
    [0.8027222167960425, 0.49388778610275924, 0.499660693222501, 0.4060752953531532, 0.6176103514929139, 0.5534518522963425, 0.3373384676999064, 0.39395420924562574, 0.3077529397641371, 0.6958842044027626],
    [0.5861338898147802, 0.5486104676634708, 0.2035849603817444, 0.31292820528949544, 0.6844958516512852, 0.6421147333216588, 0.36361749326553633, 0.5318563006374526, 0.525549718318887, 0.6099015173817846],
    [0.23210050177799815, 0.30934842721775424, 0.44742259488657943, 0.5665822875043593, 0.7961100656485632, 0.6305099009037155, 0.6539795848297586, 0.7245831343787192, 0.692706707951701, 0.9145877413310731],
    [0.5604618669127511, 0.5204017323207069, 0.7767136494867762, 0.8189493202500076, 0.582859042249942, 0.6593686221975474, 0.5242430768735112, 0.4216064473483856, 0.7565264069000804, 0.9296952395245008],
    [0.7241661550089499, 0.590418779568731, 0.6229665130160964, 0.5947588940548891, 0.804091205814178, 0.7003619473542498, 0.17439042781335717, 0.1233777904063134, 0.4867346505273751, 0.7916801710584482],
    [0.2777476674045563, 0.28371099679907963, 0.5009355266302546, 0.6278035652437046, 0.7930974267742891, 0.855262105122991, 0.45099329000197513, 0.3291760908768816, 0.5110302298115195, 0.593512606525663],
    [0.3605950476713327, 0.24944470176124395, 0.5205905713488065, 0.7227506026869135, 0.7865885421212679, 0.902925779494229, 0.6739731734847225, 0.4548174463855184, 0.16166773076263222, 0.2871770858761947],
    [0.5841169191222951, 0.5174331559348497, 0.598396841999741, 0.8674666584221665, 0.9456464360271972, 0.8109329132247985, 0.5562918352773274, 0.31887585426014387, 0.0, 0.3238643698765576],
    [0.8310850314292695, 0.6782839829568813, 0.608663782890264, 0.7366127296138837, 0.7858553012635432, 0.5211085008797773, 0.4068789368912847, 0.3134319874989461, 0.41197189051965455, 1.0],
];

fn assert_grid_matches(name: &str, grid: &Grid<f64>, expected: &[[f64; 10]; 10]) {
    assert_eq!(grid.dimensions(), (10, 10));
    for (y, row) in expected.iter().enumerate() {
        for (x, &want) in row.iter().enumerate() {
            let got = grid[(x, y)];
            assert!(
                (got - want).abs() < 1e-9,
                "{name} cell ({x}, {y}): got {got}, expected {want}"
            );
        }
    }
}

/// Scenario A, gradient kernel: seed 42, 10x10, scale 5, default octaves.
#[test]
fn test_gradient_grid_seed_42() {
    let noise = PerlinNoise::new(Seed::new(42));
    let grid = noise.generate_grid(10, 10, 5.0, &FractalParams::default());
    assert_grid_matches("perlin", &grid, &PERLIN_SEED_42);
}

/// Scenario A, simplex kernel: seed 42, 10x10, scale 5, default octaves.
#[test]
fn test_simplex_grid_seed_42() {
    let noise = SimplexNoise::new(Seed::new(42));
    let grid = noise.generate_grid(10, 10, 5.0, &FractalParams::default());
    assert_grid_matches("simplex", &grid, &SIMPLEX_SEED_42);
}

#[test]
fn test_raw_samples_seed_42() {
    let perlin = PerlinNoise::new(Seed::new(42));
    assert!((perlin.noise(0.5, 0.5) - -0.5).abs() < 1e-12);
    assert!((perlin.noise(1.3, -2.7) - -0.09182708640000001).abs() < 1e-12);
    assert!((perlin.noise(100.25, 37.75) - -0.13844776153564453).abs() < 1e-12);

    let simplex = SimplexNoise::new(Seed::new(42));
    assert!((simplex.noise(0.5, 0.5) - -0.6143130272544324).abs() < 1e-12);
    assert!((simplex.noise(1.3, -2.7) - -0.8372757114967201).abs() < 1e-12);
    assert!((simplex.noise(100.25, 37.75) - -0.3985982263150588).abs() < 1e-12);
}

#[test]
fn test_permutation_seed_42() {
    let perm = PerlinNoise::new(Seed::new(42)).permutation().as_slice().to_vec();
    assert_eq!(
        &perm[..16],
        &[181, 106, 238, 18, 176, 93, 183, 139, 95, 77, 160, 14, 2, 92, 250, 47]
    );
    let perm = SimplexNoise::new(Seed::new(0)).permutation().as_slice().to_vec();
    assert_eq!(
        &perm[..16],
        &[2, 29, 44, 147, 73, 65, 218, 193, 56, 152, 4, 28, 208, 130, 255, 41]
    );
}

/// Smooth synthetic terrain: three low-frequency waves.
fn basic_heightmap(width: usize, height: usize) -> Grid<f64> {
    Grid::from_fn(width, height, |x, y| {
        let (x, y) = (x as f64, y as f64);
        0.5 + 0.25 * (x * 0.075).sin() + 0.2 * (y * 0.065).cos() + 0.1 * ((x + y) * 0.035).sin()
    })
}

/// Scenario C: 128x128 synthetic heightmap, seed 42, 5000 droplets.
#[test]
fn test_erosion_seed_42_statistics() {
    let terrain = basic_heightmap(128, 128);
    let before = terrain.stats().unwrap();
    assert!((before.min - -0.023332208498610396).abs() < 1e-9);
    assert!((before.max - 1.0243693631465163).abs() < 1e-9);
    assert!((before.mean - 0.5626050121700976).abs() < 1e-9);
    assert!((before.std_dev - 0.23928500308445552).abs() < 1e-9);

    let params = ErosionParams {
        iterations: 5000,
        ..ErosionParams::default()
    };
    let outcome = HydraulicErosion::new(Seed::new(42)).erode_with_stats(&terrain, &params);
    let after = outcome.heightmap.stats().unwrap();

    assert!((after.min - 0.05288992320886394).abs() < 1e-6, "min {}", after.min);
    assert!((after.max - 1.0216522240367512).abs() < 1e-6, "max {}", after.max);
    assert!((after.mean - 0.5543783220094559).abs() < 1e-6, "mean {}", after.mean);
    assert!((after.std_dev - 0.2334854081560687).abs() < 1e-6, "std {}", after.std_dev);

    assert_eq!(outcome.stats.droplets, 5000);
    assert!((outcome.stats.total_eroded - 243.57373447243086).abs() < 1e-4);
    assert!((outcome.stats.total_deposited - 108.78764288053287).abs() < 1e-4);
}
