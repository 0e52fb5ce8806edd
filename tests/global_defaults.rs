// Changes to the process-wide default are visible to every test in the binary,
// so everything touching it runs inside one test function.

use ferris_bytesize::{
    default_config, set_default_config, set_default_format, set_default_number_format,
    set_long_units, ByteSize, ByteSizeError, FormatConfig, NumberFormat,
};

#[test]
fn test_global_format_changes_apply_to_display() {
    let _ = env_logger::builder().is_test(true).try_init();

    assert_eq!(default_config(), FormatConfig::default());
    assert_eq!(ByteSize::KB.to_string(), "1.00KB");

    set_default_format("%.0f ").unwrap();
    set_long_units(true);

    let table = [
        (1.0, "1 byte"),
        (1023.0, "1023 bytes"),
        (1024.0, "1 kilobyte"),
        (1048576.0, "1 megabyte"),
        (1073741824.0, "1 gigabyte"),
        (1099511627776.0, "1 terabyte"),
        (1125899906842624.0, "1 petabyte"),
        (1152921504606846976.0, "1 exabyte"),
        (1180591620717411303424.0, "1 zettabyte"),
        (1208925819614629174706176.0, "1 yottabyte"),
        (2.0 * 1.0, "2 bytes"),
        (2.0 * 1024.0, "2 kilobytes"),
        (2.0 * 1048576.0, "2 megabytes"),
        (2.0 * 1073741824.0, "2 gigabytes"),
        (2.0 * 1099511627776.0, "2 terabytes"),
        (2.0 * 1125899906842624.0, "2 petabytes"),
        (2.0 * 1152921504606846976.0, "2 exabytes"),
        (2.0 * 1180591620717411303424.0, "2 zettabytes"),
        (2.0 * 1208925819614629174706176.0, "2 yottabytes"),
        (0.0, "0 bytes"),
    ];
    for (bytes, expected) in table {
        assert_eq!(ByteSize::new(bytes).to_string(), expected);
    }

    // A rejected template leaves the current default in place.
    assert_eq!(
        set_default_format("%d"),
        Err(ByteSizeError::InvalidFormat("%d".to_string()))
    );
    assert_eq!(ByteSize::KB.to_string(), "1 kilobyte");

    set_default_number_format(NumberFormat::with_precision(1).suffix(" "));
    set_long_units(false);
    assert_eq!(ByteSize::new(1536.0).to_string(), "1.5 KB");

    let snapshot = default_config();
    assert_eq!(snapshot.number_format.to_string(), "%.1f ");
    assert!(!snapshot.long_units);

    set_default_config(FormatConfig::default());
    assert_eq!(ByteSize::new(1536.0).to_string(), "1.50KB");
}
