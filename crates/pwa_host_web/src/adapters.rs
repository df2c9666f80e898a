use std::rc::Rc;

use pwa_host::{ListenerCleanup, NoopPwaHost, PwaConfig, PwaFacade, PwaHost};

use crate::{bridge, WebPwaHost};

/// Returns the PWA host for the active build target.
///
/// Browser builds get [`WebPwaHost`]; other targets get [`NoopPwaHost`].
pub fn pwa_host() -> Rc<dyn PwaHost> {
    if cfg!(target_arch = "wasm32") {
        Rc::new(WebPwaHost)
    } else {
        Rc::new(NoopPwaHost)
    }
}

/// Suppresses the platform install banner and routes install signals into `facade`.
///
/// `beforeinstallprompt` events are captured as the facade's deferred prompt and `appinstalled`
/// drops any pending prompt. Both listeners stay attached while the returned handle lives.
pub fn install_prompt_listeners(facade: Rc<PwaFacade>) -> ListenerCleanup {
    bridge::install_prompt_listeners(facade)
}

/// Builds the browser facade and attaches its install prompt listeners.
///
/// Hold on to the returned handle; dropping it stops install prompts from being captured.
pub fn build_pwa_facade(config: PwaConfig) -> (Rc<PwaFacade>, ListenerCleanup) {
    let facade = Rc::new(PwaFacade::with_config(pwa_host(), config));
    let cleanup = install_prompt_listeners(Rc::clone(&facade));
    (facade, cleanup)
}
