use super::error::{TillError, TillResult};
use shared::{InvoiceAdjustment, StoreInfo};
use std::path::PathBuf;
use std::time::Duration;
use till_printer::{PairedDevice, parse_paired_devices};

/// Narrowest paper that fits the full receipt rule
pub const MIN_PAPER_WIDTH: usize = 24;

/// Till configuration
///
/// # Environment variables
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | TILL_LOG_LEVEL | info | log level |
/// | TILL_LOG_DIR | - | directory for daily log files |
/// | TILL_PAPER_WIDTH | 32 | receipt characters per line, at least 24 |
/// | TILL_PRINTER_MATCH | Printer | name substring used to pick the printer |
/// | TILL_PRINTER_NAME | - | exact paired device name to use instead |
/// | TILL_PAIRED_DEVICES | - | `name\|address\|node` entries separated by `;` |
/// | TILL_PRINT_TIMEOUT_MS | 5000 | bound on connect and print |
/// | TILL_CATALOG_PATH | - | JSON catalog file |
/// | TILL_CURRENCY | Rs. | currency symbol on receipts |
/// | TILL_SCREEN_CURRENCY | ₹ | currency symbol on screen |
/// | TILL_CLEAR_ON_FINALIZE | true | start an empty bill after finalize |
/// | TILL_FIRST_TOKEN | 1 | token number of the first bill |
/// | TILL_SYSFS_ROOT | /sys | sysfs mount used for the Bluetooth probe |
/// | TILL_STORE_NAME / _ADDRESS / _PHONE / _TAX_ID | RAGA PVT LTD ... | receipt header |
///
/// Store address lines are separated by `;`.
#[derive(Debug, Clone)]
pub struct Config {
    pub log_level: String,
    pub log_dir: Option<String>,
    pub paper_width: usize,
    pub printer_match: String,
    pub printer_name: Option<String>,
    pub paired_devices: Vec<PairedDevice>,
    pub print_timeout: Duration,
    pub catalog_path: Option<PathBuf>,
    pub currency: String,
    pub screen_currency: String,
    pub clear_on_finalize: bool,
    pub first_token: u32,
    pub sysfs_root: PathBuf,
    pub store: StoreInfo,
    /// Fixed discount/tax lines on the invoice
    pub adjustments: Vec<InvoiceAdjustment>,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> TillResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from any key lookup
    ///
    /// Unset or empty keys fall back to defaults; set but malformed
    /// numeric keys are errors.
    pub fn from_lookup<F>(lookup: F) -> TillResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let parse = |key: &str| -> TillResult<Option<u64>> {
            get(key)
                .map(|v| {
                    v.trim()
                        .parse::<u64>()
                        .map_err(|_| TillError::Config(format!("{} must be a number, got {}", key, v)))
                })
                .transpose()
        };

        let defaults = StoreInfo::default();
        let store = StoreInfo {
            name: get("TILL_STORE_NAME").unwrap_or(defaults.name),
            address: get("TILL_STORE_ADDRESS")
                .map(|v| v.split(';').map(|l| l.trim().to_string()).collect())
                .unwrap_or(defaults.address),
            phone: get("TILL_STORE_PHONE").unwrap_or(defaults.phone),
            tax_id: get("TILL_STORE_TAX_ID").unwrap_or(defaults.tax_id),
        };

        let paired_devices = match get("TILL_PAIRED_DEVICES") {
            Some(list) => parse_paired_devices(&list)?,
            None => Vec::new(),
        };

        let paper_width = parse("TILL_PAPER_WIDTH")?.unwrap_or(32) as usize;
        if paper_width < MIN_PAPER_WIDTH {
            return Err(TillError::Config(format!(
                "TILL_PAPER_WIDTH must be at least {}, got {}",
                MIN_PAPER_WIDTH, paper_width
            )));
        }

        let first_token = match parse("TILL_FIRST_TOKEN")? {
            Some(t) => u32::try_from(t)
                .map_err(|_| TillError::Config(format!("TILL_FIRST_TOKEN out of range: {}", t)))?,
            None => 1,
        };

        let clear_on_finalize = match get("TILL_CLEAR_ON_FINALIZE") {
            Some(v) => v.trim().parse::<bool>().map_err(|_| {
                TillError::Config(format!("TILL_CLEAR_ON_FINALIZE must be true or false, got {}", v))
            })?,
            None => true,
        };

        Ok(Self {
            log_level: get("TILL_LOG_LEVEL").unwrap_or_else(|| "info".into()),
            log_dir: get("TILL_LOG_DIR"),
            paper_width,
            printer_match: get("TILL_PRINTER_MATCH").unwrap_or_else(|| "Printer".into()),
            printer_name: get("TILL_PRINTER_NAME"),
            paired_devices,
            print_timeout: Duration::from_millis(parse("TILL_PRINT_TIMEOUT_MS")?.unwrap_or(5000)),
            catalog_path: get("TILL_CATALOG_PATH").map(PathBuf::from),
            currency: get("TILL_CURRENCY").unwrap_or_else(|| "Rs.".into()),
            screen_currency: get("TILL_SCREEN_CURRENCY").unwrap_or_else(|| "₹".into()),
            clear_on_finalize,
            first_token,
            sysfs_root: get("TILL_SYSFS_ROOT")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("/sys")),
            store,
            adjustments: InvoiceAdjustment::standard(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(|_| None).unwrap();
        assert_eq!(config.paper_width, 32);
        assert_eq!(config.printer_match, "Printer");
        assert_eq!(config.print_timeout, Duration::from_secs(5));
        assert_eq!(config.currency, "Rs.");
        assert!(config.clear_on_finalize);
        assert_eq!(config.first_token, 1);
        assert_eq!(config.store.name, "RAGA PVT LTD");
        assert!(config.paired_devices.is_empty());
        assert_eq!(config.adjustments.len(), 5);
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup(&[
            ("TILL_PAPER_WIDTH", "48"),
            ("TILL_PAIRED_DEVICES", "BT Printer|aa:bb:cc:dd:ee:ff|/dev/rfcomm0"),
            ("TILL_PRINT_TIMEOUT_MS", "250"),
            ("TILL_STORE_ADDRESS", "1 Main St; Springfield"),
            ("TILL_CLEAR_ON_FINALIZE", "false"),
            ("TILL_FIRST_TOKEN", "41"),
            ("TILL_PRINTER_NAME", ""),
        ]))
        .unwrap();

        assert_eq!(config.paper_width, 48);
        assert_eq!(config.paired_devices.len(), 1);
        assert_eq!(config.print_timeout, Duration::from_millis(250));
        assert_eq!(config.store.address, vec!["1 Main St", "Springfield"]);
        assert!(!config.clear_on_finalize);
        assert_eq!(config.first_token, 41);
        assert!(config.printer_name.is_none());
    }

    #[test]
    fn test_malformed_values() {
        assert!(Config::from_lookup(lookup(&[("TILL_PAPER_WIDTH", "wide")])).is_err());
        assert!(Config::from_lookup(lookup(&[("TILL_PAPER_WIDTH", "8")])).is_err());
        assert!(Config::from_lookup(lookup(&[("TILL_PAPER_WIDTH", "23")])).is_err());
        assert_eq!(
            Config::from_lookup(lookup(&[("TILL_PAPER_WIDTH", "24")]))
                .unwrap()
                .paper_width,
            24
        );
        assert!(Config::from_lookup(lookup(&[("TILL_CLEAR_ON_FINALIZE", "yes")])).is_err());
        assert!(Config::from_lookup(lookup(&[("TILL_PAIRED_DEVICES", "Printer")])).is_err());
    }
}
