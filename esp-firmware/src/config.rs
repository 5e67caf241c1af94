// Projekt-Konfiguration: Konstanten und Hardware-Zuordnungen
#![allow(dead_code)]

// ============================================================================
// GPIO Konfiguration
// ============================================================================

/// Drehgeber Kanal A (CLK) - Interrupt auf beiden Flanken
pub const ENCODER_CLK_GPIO_PIN: u8 = 4;

/// Drehgeber Kanal B (DT) - wird im Interrupt nur gelesen
pub const ENCODER_DT_GPIO_PIN: u8 = 5;

/// Taster - Interrupt auf fallender Flanke (Pull-up, gedrückt = low)
/// GPIO9 ist der BOOT-Taster auf dem ESP32-C6 DevKit
pub const BUTTON_GPIO_PIN: u8 = 9;

/// GPIO-Pin für die RGB LED (WS2812/Neopixel)
pub const LED_GPIO_PIN: u8 = 8;

// ============================================================================
// Event-Queues
// ============================================================================

/// Kapazität jeder Tastendruck-Queue
/// Bei voller Queue wird der neue Druck für diesen Consumer verworfen
pub const BUTTON_QUEUE_CAPACITY: usize = 1;

/// Anzahl Consumer am Fan-out (Reporter + LED-Anzeige)
pub const BUTTON_CONSUMERS: usize = 2;

// ============================================================================
// LED Konfiguration
// ============================================================================

/// Helligkeits-Level für die LED (0-255)
pub const LED_BRIGHTNESS: u8 = 10;

/// RMT Taktfrequenz in MHz
/// 80 MHz ist optimal für WS2812 LED-Timing
pub const RMT_CLOCK_MHZ: u32 = 80;

// ============================================================================
// Encoder Monitor
// ============================================================================

/// Zählerstand periodisch loggen
pub const MONITOR_ENCODER: bool = false;

/// Log-Intervall des Encoder Monitors
pub const MONITOR_INTERVAL_SECS: u64 = 1;

// ============================================================================
// WiFi Konfiguration
// ============================================================================

/// WiFi SSID (Netzwerk-Name)
/// Wird zur Build-Zeit aus der Environment Variable WIFI_SSID geladen
pub const WIFI_SSID: &str = env!(
    "WIFI_SSID",
    "WiFi SSID nicht gesetzt! Erstelle .env file (siehe .env.example)"
);

/// WiFi Passwort
/// Wird zur Build-Zeit aus der Environment Variable WIFI_PASSWORD geladen
pub const WIFI_PASSWORD: &str = env!(
    "WIFI_PASSWORD",
    "WiFi Password nicht gesetzt! Erstelle .env file (siehe .env.example)"
);

/// Wartezeit nach WiFi-Fehler vor erneutem Versuch
pub const WIFI_RETRY_DELAY_SECS: u64 = 5;

/// Heap-Größe für WiFi (Bytes)
pub const WIFI_HEAP_SIZE: usize = 65536; // 64 KB

/// Zusätzliche Heap-Größe (Bytes)
pub const EXTRA_HEAP_SIZE: usize = 36864; // 36 KB

// ============================================================================
// HTTP Report Konfiguration
// ============================================================================

/// Collector Hostname oder IP-Adresse
/// Wird zur Build-Zeit aus der Environment Variable REPORT_HOST geladen
pub const REPORT_HOST: &str = env!(
    "REPORT_HOST",
    "Report Host nicht gesetzt! Erstelle .env file (siehe .env.example)"
);

/// Collector Port
pub const REPORT_PORT: u16 = 5000;

/// Pfad für den POST Request
pub const REPORT_PATH: &str = "/post-data";

/// DNS Query Timeout in Sekunden
pub const DNS_TIMEOUT_SECS: u64 = 10;

/// Timeout für den TCP-Verbindungsaufbau
pub const CONNECT_TIMEOUT_SECS: u64 = 10;

/// TCP RX Buffer-Größe in Bytes
pub const TCP_RX_BUFFER_SIZE: usize = 1024;

/// TCP TX Buffer-Größe in Bytes (Request ist max. 512 Bytes)
pub const TCP_TX_BUFFER_SIZE: usize = 1024;

/// Anzahl Sockets im Netzwerk-Stack (DNS + Report)
pub const NET_SOCKET_COUNT: usize = 3;
