use std::{fs, io::Write};

use gradient_regression::{
    RegressionErr,
    data::DatasetReader,
    regression::{LinearRegression, Regression},
    storage::{JsonStore, ParamStore},
    training::{Checkpoint, TrainConfig},
};
use rand::{SeedableRng, rngs::StdRng};

/// Writes `rows` rows of `y = 0.5 * a + 2 * b + 1` with the label in the last column.
fn write_dataset(rows: usize) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "a,b,y").unwrap();

    for i in 0..rows {
        let a = (i % 10) as f64 / 10.;
        let b = (i % 3) as f64 / 3.;
        writeln!(file, "{a},{b},{}", 0.5 * a + 2. * b + 1.).unwrap();
    }

    file
}

#[test]
fn csv_to_trained_model() {
    let file = write_dataset(99);
    let (train, test) = DatasetReader::from_path(file.path())
        .unwrap()
        .split(2, 0.7)
        .unwrap();

    // 100 rows with the header -> threshold 70 -> data rows 1..=69 train.
    assert_eq!(train.len(), 69);
    assert_eq!(test.len(), 30);

    let mut rng = StdRng::seed_from_u64(42);
    let mut model = LinearRegression::new("integration", train, &mut rng).unwrap();
    let initial_train = model.cost(None).unwrap();
    let initial_test = model.cost(Some(test.as_slice())).unwrap();

    let mut checkpoints = Vec::new();
    let stats = model
        .train(&TrainConfig::new(0.5, 300, 50), &mut |c: Checkpoint| {
            checkpoints.push(c)
        })
        .unwrap();

    assert_eq!(stats.iterations(), 300);
    assert_eq!(checkpoints.len(), 6);
    assert_eq!(checkpoints.last().unwrap().cost, model.cost(None).unwrap());
    assert!(model.cost(None).unwrap() < initial_train / 100.);
    assert!(model.cost(Some(test.as_slice())).unwrap() < initial_test / 100.);
}

#[test]
fn resume_from_a_json_store() {
    let file = write_dataset(30);
    let (train, _) = DatasetReader::from_path(file.path())
        .unwrap()
        .split(2, 1.)
        .unwrap();

    let dir = tempfile::tempdir().unwrap();
    let mut store = JsonStore::new(dir.path());

    let mut first = LinearRegression::new("resume", train.clone(), &mut StdRng::seed_from_u64(1))
        .unwrap();
    first.fit(0.5, 100, 100).unwrap();
    first.save_params(&mut store).unwrap();

    let saved = fs::read_to_string(store.path_for("resume")).unwrap();
    assert!(saved.contains("weights"));
    assert!(saved.contains("bias"));

    let mut second = LinearRegression::new("resume", train, &mut StdRng::seed_from_u64(2))
        .unwrap();
    second.load_params(&store).unwrap();
    assert_eq!(second.params(), first.params());

    first.fit(0.5, 10, 10).unwrap();
    second.fit(0.5, 10, 10).unwrap();
    assert_eq!(second.params(), first.params());
    assert_eq!(store.load("resume").unwrap().feature_size(), 2);
}

#[test]
fn malformed_rows_fail_the_split() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "a,y\n1,2\n,3").unwrap();

    let err = DatasetReader::from_path(file.path())
        .unwrap()
        .split(1, 0.5)
        .unwrap_err();

    assert!(matches!(err, RegressionErr::DataSource(_)));
}
