//! CLI parser
use clap::Parser;
use std::num::NonZeroU16;

#[derive(Parser, Debug)]
/// CLI Options
pub struct CliOptions {
    #[clap(long, help = "Enable debug logging", env = "PROPHECY_DEBUG")]
    /// Enable debug logging. Env: PROPHECY_DEBUG
    pub debug: bool,
    #[clap(long, short, default_value = "9000", env = "PROPHECY_PORT")]
    /// http listener, defaults to `9000`.
    /// Env: PROPHECY_PORT
    pub port: NonZeroU16,
    #[clap(
        long,
        short,
        default_value = "127.0.0.1",
        env = "PROPHECY_LISTEN_ADDRESS"
    )]
    /// Listen address, defaults to `127.0.0.1`.
    /// Env: PROPHECY_LISTEN_ADDRESS
    pub listen_address: String,

    #[clap(long, env = "PROPHECY_PUBLIC_URL")]
    /// Public base URL, only used to build the convenience link on `GET /`,
    /// eg `https://prophecy.example.com`.
    /// Env: PROPHECY_PUBLIC_URL
    pub public_url: Option<String>,

    #[clap(
        long,
        default_value = crate::constants::DEFAULT_GEMINI_MODEL,
        env = "GEMINI_MODEL"
    )]
    /// Gemini model identifier used for quote generation.
    /// Env: GEMINI_MODEL
    pub gemini_model: String,
}
