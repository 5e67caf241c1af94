// Keine Standard-Bibliothek verwenden (Embedded System)
#![no_std]
// Kein normaler main() Einstiegspunkt (wird von esp_rtos bereitgestellt)
#![no_main]
// Verbiete mem::forget - gefährlich bei ESP HAL Types mit DMA-Buffern
#![deny(
    clippy::mem_forget,
    reason = "mem::forget is generally not safe to do with esp_hal types, especially those \
    holding buffers for the duration of a data transfer."
)]
// Verbiete große Stack-Frames (Stack ist auf Embedded Systemen begrenzt)
#![deny(clippy::large_stack_frames)]

// Heap Allocator (WiFi benötigt dynamischen Speicher)
extern crate alloc;

// Embassy Async Runtime
use defmt::info;
use embassy_executor::Spawner;
use embassy_net::{Config as NetConfig, Stack, StackResources};
use embassy_time::{Duration, Timer};

// ESP32-C6 HAL
use esp_hal::clock::CpuClock;
use esp_hal::gpio::{Input, InputConfig, Io, Pull};
use esp_hal::rng::Rng;
use esp_hal::timer::timg::TimerGroup;

// Backtrace bei Panic und println!() Support
use {esp_backtrace as _, esp_println as _};

// Projekt-Module und Konfiguration
use esp_drehgeber::config::{EXTRA_HEAP_SIZE, MONITOR_ENCODER, NET_SOCKET_COUNT, WIFI_HEAP_SIZE};
use esp_drehgeber::hal::inputs;
use esp_drehgeber::tasks::{
    connection_task, debounce_task, dhcp_task, encoder_monitor_task, indicator_task, net_task,
    report_task,
};
use esp_drehgeber::{ButtonFanout, ButtonPressChannel};

// ESP-IDF App Descriptor - erforderlich für den Bootloader!
// Ohne diesen schlägt das Flashen mit "ESP-IDF App Descriptor missing" fehl
esp_bootloader_esp_idf::esp_app_desc!();

/// Main Entry Point
///
/// Initialisiert Hardware, WiFi und die Eingänge, verdrahtet die Queues
/// und spawnt alle Tasks. Danach schläft main() - alle Arbeit läuft in
/// Tasks und im GPIO-Interrupt.
#[esp_rtos::main]
async fn main(spawner: Spawner) -> ! {
    // ESP32-C6 Konfiguration: CPU auf maximale Taktfrequenz (160 MHz)
    let config = esp_hal::Config::default().with_cpu_clock(CpuClock::max());
    let peripherals = esp_hal::init(config);

    // Heap Allocator initialisieren (WiFi braucht dynamischen Speicher!)
    esp_alloc::heap_allocator!(
        #[esp_hal::ram(reclaimed)]
        size: WIFI_HEAP_SIZE
    );
    esp_alloc::heap_allocator!(size: EXTRA_HEAP_SIZE);

    // Embassy Runtime initialisieren (Timer + Software Interrupt)
    let timg0 = TimerGroup::new(peripherals.TIMG0);
    let sw_interrupt =
        esp_hal::interrupt::software::SoftwareInterruptControl::new(peripherals.SW_INTERRUPT);
    esp_rtos::start(timg0.timer0, sw_interrupt.software_interrupt0);

    // WiFi Hardware initialisieren
    static RADIO_INIT: static_cell::StaticCell<esp_radio::Controller> =
        static_cell::StaticCell::new();
    let radio_init =
        RADIO_INIT.init(esp_radio::init().expect("Failed to initialize Wi-Fi/BLE controller"));

    let (wifi_controller, wifi_interface) =
        esp_radio::wifi::new(radio_init, peripherals.WIFI, Default::default())
            .expect("Failed to initialize Wi-Fi");

    // Random seed für TCP/IP Stack (von Hardware RNG)
    let rng = Rng::new();
    let seed = (rng.random() as u64) << 32 | rng.random() as u64;

    // DNS-Query + Report-Socket
    static RESOURCES: static_cell::StaticCell<StackResources<NET_SOCKET_COUNT>> =
        static_cell::StaticCell::new();
    let resources = RESOURCES.init(StackResources::new());

    let (stack, runner) = embassy_net::new(
        wifi_interface.sta,
        NetConfig::dhcpv4(Default::default()),
        resources,
        seed,
    );

    // Stack muss 'static sein für Tasks
    static STACK: static_cell::StaticCell<Stack<'static>> = static_cell::StaticCell::new();
    let stack = &*STACK.init(stack);

    // Eingänge: Drehgeber CLK/DT + Taster, alle mit Pull-up
    let input_config = InputConfig::default().with_pull(Pull::Up);
    let clk = Input::new(peripherals.GPIO4, input_config);
    let dt = Input::new(peripherals.GPIO5, input_config);
    let button = Input::new(peripherals.GPIO9, input_config);

    let mut io = Io::new(peripherals.IO_MUX);
    let handles = inputs::install(&mut io, clk, dt, button);

    // Eine Queue pro Consumer, der Fan-out kennt nur die Sender
    static REPORT_CHANNEL: static_cell::StaticCell<ButtonPressChannel> =
        static_cell::StaticCell::new();
    let report_channel = &*REPORT_CHANNEL.init(ButtonPressChannel::new());

    static INDICATOR_CHANNEL: static_cell::StaticCell<ButtonPressChannel> =
        static_cell::StaticCell::new();
    let indicator_channel = &*INDICATOR_CHANNEL.init(ButtonPressChannel::new());

    let fanout = ButtonFanout::new([report_channel.sender(), indicator_channel.sender()]);

    // Spawn WiFi Tasks
    spawner.spawn(connection_task(wifi_controller)).unwrap();
    spawner.spawn(net_task(runner)).unwrap();
    spawner.spawn(dhcp_task(stack)).unwrap();

    // Spawn Entprell-Timer (einziger Producer am Fan-out)
    spawner
        .spawn(debounce_task(handles.debouncer, handles.button, fanout))
        .unwrap();

    // Spawn Consumer
    spawner
        .spawn(report_task(
            stack,
            handles.counter,
            report_channel.receiver(),
        ))
        .unwrap();

    spawner
        .spawn(indicator_task(
            peripherals.GPIO8,
            peripherals.RMT,
            indicator_channel.receiver(),
            handles.counter,
        ))
        .unwrap();

    if MONITOR_ENCODER {
        spawner.spawn(encoder_monitor_task(handles.counter)).unwrap();
    }

    info!("Drehgeber ready");

    // Main-Loop: schläft (alle Arbeit läuft in Tasks)
    loop {
        Timer::after(Duration::from_secs(3600)).await;
    }
}
