/// Fallback destination when no address is given on the command line.
/// It must be a broadcast address of the network under test for the
/// reflected packets to actually reach anyone.
pub const DEFAULT_DEST_ADDR: &str = "10.1.1.255";

/// UDP port the reflector listens on unless overridden.
pub const DEFAULT_LISTEN_PORT: u16 = 32002;

/// Port the rebroadcast packets are sent to. Deliberately not exposed on
/// the command line; the counterpart tooling on the other side of the
/// link expects this port.
pub const DEFAULT_BROADCAST_PORT: u16 = 11111;

/// Global runtime configuration for the reflector process.
///
/// Constructed once from the command line at startup and passed by
/// reference into the core; nothing mutates it afterwards.
#[derive(Debug, Clone)]
pub struct Config {
    /// Textual IP address the received packets are rebroadcast to.
    ///
    /// This is normally a subnet broadcast address (e.g. `10.1.1.255`).
    /// A unicast address also works and is what the integration tests
    /// use, since broadcast loopback needs a real same-subnet setup.
    pub dest_addr: String,

    /// UDP port the receiving socket binds to, on all interfaces.
    pub listen_port: u16,

    /// Destination port of the rebroadcast packets.
    ///
    /// Defaults to [`DEFAULT_BROADCAST_PORT`] and has no command-line
    /// flag; it lives here so the loop can be pointed at a scratch port
    /// under test.
    pub broadcast_port: u16,

    /// Controls the visual density of the terminal output.
    ///
    /// * **0** (default): banner, headers and per-packet report lines.
    /// * **1**: no decoration, report lines only (suitable for piping).
    pub quiet: u8,

    /// Suppresses the startup ASCII banner while keeping everything else.
    pub no_banner: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dest_addr: DEFAULT_DEST_ADDR.to_string(),
            listen_port: DEFAULT_LISTEN_PORT,
            broadcast_port: DEFAULT_BROADCAST_PORT,
            quiet: 0,
            no_banner: false,
        }
    }
}
