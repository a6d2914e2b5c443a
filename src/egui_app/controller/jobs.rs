use std::sync::mpsc::{Receiver, Sender};
use std::thread;

use crate::sentiment::AnalysisOutcome;
use crate::sentiment_api::{AnalysisClient, AnalysisRequest, AnalyzeError};

type TryRecvError = std::sync::mpsc::TryRecvError;

pub(crate) enum JobMessage {
    AnalysisFinished(AnalysisJobResult),
}

#[derive(Debug)]
pub(crate) struct AnalysisJobResult {
    pub(crate) request_id: u64,
    pub(crate) result: Result<AnalysisOutcome, AnalyzeError>,
}

/// How a finished analysis relates to the request the controller is tracking.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum AnalysisFinish {
    /// The tracked request; its result should be shown.
    Current,
    /// The tracked request, abandoned after it started; drop the result.
    Abandoned,
    /// Not the tracked request.
    Unknown,
}

/// Background work owned by the controller, reporting back over one channel.
pub(crate) struct ControllerJobs {
    message_tx: Sender<JobMessage>,
    message_rx: Receiver<JobMessage>,
    next_request_id: u64,
    /// The running analysis worker; held until its message arrives.
    analysis_in_flight: Option<u64>,
    analysis_abandoned: bool,
}

impl ControllerJobs {
    pub(super) fn new() -> Self {
        let (message_tx, message_rx) = std::sync::mpsc::channel::<JobMessage>();
        Self {
            message_tx,
            message_rx,
            next_request_id: 1,
            analysis_in_flight: None,
            analysis_abandoned: false,
        }
    }

    pub(super) fn try_recv_message(&self) -> Result<JobMessage, TryRecvError> {
        self.message_rx.try_recv()
    }

    pub(super) fn analysis_in_progress(&self) -> bool {
        self.analysis_in_flight.is_some()
    }

    pub(super) fn in_flight_request(&self) -> Option<u64> {
        self.analysis_in_flight
    }

    /// Run `request` on a worker thread; returns `None` if one is already running.
    pub(super) fn begin_analysis(
        &mut self,
        client: AnalysisClient,
        request: AnalysisRequest,
    ) -> Option<u64> {
        if self.analysis_in_flight.is_some() {
            return None;
        }
        let request_id = self.next_request_id;
        self.next_request_id += 1;
        self.analysis_in_flight = Some(request_id);
        self.analysis_abandoned = false;
        let tx = self.message_tx.clone();
        thread::spawn(move || {
            let result = client.analyze(&request);
            let _ = tx.send(JobMessage::AnalysisFinished(AnalysisJobResult {
                request_id,
                result,
            }));
        });
        Some(request_id)
    }

    /// Mark `request_id` finished and release the worker slot.
    pub(super) fn finish_analysis(&mut self, request_id: u64) -> AnalysisFinish {
        if self.analysis_in_flight != Some(request_id) {
            return AnalysisFinish::Unknown;
        }
        self.analysis_in_flight = None;
        if std::mem::take(&mut self.analysis_abandoned) {
            AnalysisFinish::Abandoned
        } else {
            AnalysisFinish::Current
        }
    }

    /// Drop the in-flight request's result when it arrives.
    ///
    /// The worker keeps its slot until it reports, so no second request can
    /// start beside it.
    pub(super) fn abandon_analysis(&mut self) -> Option<u64> {
        if self.analysis_abandoned {
            return None;
        }
        let request_id = self.analysis_in_flight?;
        self.analysis_abandoned = true;
        Some(request_id)
    }
}
