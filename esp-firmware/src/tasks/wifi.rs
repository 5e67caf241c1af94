// WiFi Task - Verbindet mit WLAN und managed Connection
use defmt::{Debug2Format, error, info, warn};
use embassy_net::{Runner, Stack};
use embassy_time::{Duration, Timer};
use esp_radio::wifi::{ClientConfig, ModeConfig, WifiController, WifiDevice, WifiEvent};

use crate::config::{WIFI_PASSWORD, WIFI_RETRY_DELAY_SECS, WIFI_SSID};

/// WiFi Connection Task
///
/// Managed die WiFi-Verbindung:
/// - Konfiguriert Station-Modus und startet den Controller
/// - Verbindet mit Access Point
/// - Wartet auf Disconnect und verbindet neu
#[embassy_executor::task]
pub async fn connection_task(mut controller: WifiController<'static>) {
    info!("WIFI: Starting connection task");

    loop {
        if matches!(controller.is_started(), Ok(false)) {
            let client_config = ModeConfig::Client(
                ClientConfig::default()
                    .with_ssid(WIFI_SSID.into())
                    .with_password(WIFI_PASSWORD.into()),
            );

            if let Err(e) = controller.set_config(&client_config) {
                error!("WIFI: Failed to set configuration: {}", Debug2Format(&e));
                Timer::after(Duration::from_secs(WIFI_RETRY_DELAY_SECS)).await;
                continue;
            }

            if let Err(e) = controller.start_async().await {
                error!("WIFI: Failed to start: {}", Debug2Format(&e));
                Timer::after(Duration::from_secs(WIFI_RETRY_DELAY_SECS)).await;
                continue;
            }

            info!("WIFI: Started");
        }

        info!("WIFI: Connecting to '{}'...", WIFI_SSID);
        if let Err(e) = controller.connect_async().await {
            error!("WIFI: Connection failed: {}", Debug2Format(&e));
            Timer::after(Duration::from_secs(WIFI_RETRY_DELAY_SECS)).await;
            continue;
        }
        info!("WIFI: Connected");

        controller.wait_for_event(WifiEvent::StaDisconnected).await;
        warn!("WIFI: Disconnected from AP, will retry...");

        Timer::after(Duration::from_secs(WIFI_RETRY_DELAY_SECS)).await;
    }
}

/// Network Task - prozessiert Pakete des TCP/IP Stacks
#[embassy_executor::task]
pub async fn net_task(mut runner: Runner<'static, WifiDevice<'static>>) -> ! {
    runner.run().await
}

/// DHCP Monitor Task
///
/// Loggt die Netzwerk-Konfiguration sobald eine IP-Adresse vorliegt
#[embassy_executor::task]
pub async fn dhcp_task(stack: &'static Stack<'static>) {
    wait_for_network(stack).await;

    if let Some(config) = stack.config_v4() {
        info!("WIFI: Got IP address");
        info!("  IP:      {}", Debug2Format(&config.address.address()));
        info!("  Gateway: {}", Debug2Format(&config.gateway));
        info!("  DNS:     {}", Debug2Format(&config.dns_servers));
    }
}

/// Wartet bis Link up ist und DHCP eine Adresse geliefert hat
pub async fn wait_for_network(stack: &'static Stack<'static>) {
    loop {
        if stack.is_link_up() && stack.config_v4().is_some() {
            break;
        }
        Timer::after(Duration::from_millis(500)).await;
    }
}
