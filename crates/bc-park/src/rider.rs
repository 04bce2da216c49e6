//! Rider actor: wander, queue, wait for a car, start the ride, wait for it
//! to end, repeat.

use bc_core::{ActorRng, RiderId};
use bc_pacing::Pacing;
use bc_sync::Wake;
use log::debug;

use crate::shared::{CloseOnPanic, Shared};
use crate::{ParkEvent, RiderState};

/// Run rider `id` until the park closes.  Returns the rides it took.
///
/// The rider only leaves at a safe point: between rides, while wandering,
/// or while parked on one of its gates after shutdown was requested.  It
/// never abandons a ride it has started, because its car is blocked on the
/// start signal until it arrives.
pub(crate) fn run_rider<P: Pacing>(id: RiderId, park: &Shared, pacing: &P, mut rng: ActorRng) -> u64 {
    let _guard = CloseOnPanic(park);
    let mut rides = 0u64;

    loop {
        park.board.set_rider_state(id, RiderState::Wandering);
        let delay = pacing.wander_delay(id, &mut rng);
        debug!("{id} wandering about for {delay:?}");
        park.journal.record(ParkEvent::Wandering { rider: id, delay });
        if park.shutdown.sleep(delay) {
            break;
        }

        park.board.set_rider_state(id, RiderState::Waiting);
        debug!("{id} getting in line for a car");
        park.journal.record(ParkEvent::Enqueued { rider: id });
        park.line.enqueue(id);

        if park.seat_gates.wait(id, &park.shutdown) == Wake::Shutdown {
            break;
        }

        park.board.set_rider_state(id, RiderState::Riding);
        debug!("{id} is seated and starts the ride");
        park.journal.record(ParkEvent::Seated { rider: id });
        park.journal.record(ParkEvent::StartSignaled { rider: id });
        park.start.signal();

        if park.end_gates.wait(id, &park.shutdown) == Wake::Shutdown {
            break;
        }

        rides += 1;
        debug!("{id} ride over, getting out");
        park.journal.record(ParkEvent::RideOver { rider: id });
        if park.countdown.is_terminal() {
            break;
        }
    }

    park.board.set_rider_state(id, RiderState::Wandering);
    debug!("{id} leaves the park after {rides} rides");
    park.journal.record(ParkEvent::RiderExited { rider: id, rides });
    rides
}
