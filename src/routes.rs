// Route entries - single source of truth for every served path

pub const DEFAULT_KEY: &str = "default";
pub const DEFAULT_PATH: &str = "default/file.txt";

pub const ROUTES: &[(&str, &str)] = &[
    ("server_dev", "server_dev/install1.txt"),
    ("server_qa", "server_qa/install2.txt"),
    ("server_prod", "server_prod/install3.txt"),
    ("user_type_1", "user_type_1/file1.txt"),
    ("user_type_2", "user_type_2/file2.txt"),
    ("user_type_3", "user_type_3/file3.txt"),
    (DEFAULT_KEY, DEFAULT_PATH),
];
