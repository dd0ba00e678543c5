// ABOUTME: Lookup from SCM internal model codes to marketing names.
// ABOUTME: Unknown codes pass through unchanged.

/// Model codes as reported by the Config API, with the names shown in
/// the SCM UI. Xirrus entries matter: those rows are access points and
/// get filtered out of the appliance list.
const MODEL_NAMES: &[(&str, &str)] = &[
    ("panda", "SDI-130"),
    ("raccoon", "SDI-330"),
    ("grizzly", "SDI-1030"),
    ("yogi", "SDI-5030"),
    ("aardvark", "SDI-VGW"),
    ("koala", "SDI-AP3"),
    ("bella", "SDI-AP5"),
    ("xr320", "Xirrus XR-320"),
    ("xr620", "Xirrus XR-620"),
    ("xd2-240", "Xirrus XD2-240"),
];

pub fn model_name(code: &str) -> String {
    MODEL_NAMES
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, name)| (*name).to_string())
        .unwrap_or_else(|| code.to_string())
}
