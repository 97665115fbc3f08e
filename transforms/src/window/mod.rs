pub(crate) mod cumulative_trapezoid;
pub(crate) mod oscillator;

pub(crate) use cumulative_trapezoid::CumulativeTrapezoid;
pub(crate) use oscillator::SdofOscillator;

/// A stateful operator fed one sample at a time. Every transform here
/// works on a uniform time base, so samples carry no timestamps.
pub(crate) trait Window: Clone {
    type InputType: Copy;
    type OutputType;

    /// Feeds the next sample, returns true once the window can emit output.
    fn push(&mut self, value: Self::InputType) -> bool;
    fn output(&self) -> Option<Self::OutputType>;
}

#[derive(Clone)]
pub(crate) struct WindowIter<I, W>
where
    I: Iterator<Item = W::InputType>,
    W: Window,
{
    window_function: W,
    source: I,
}

impl<I, W> WindowIter<I, W>
where
    I: Iterator<Item = W::InputType>,
    W: Window,
{
    pub(crate) fn new(source: I, window_function: W) -> Self {
        WindowIter {
            source,
            window_function,
        }
    }
}

impl<I, W> Iterator for WindowIter<I, W>
where
    I: Iterator<Item = W::InputType>,
    W: Window,
{
    type Item = W::OutputType;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let value = self.source.next()?;
            if self.window_function.push(value) {
                return self.window_function.output();
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.source.size_hint().1)
    }
}

pub(crate) trait WindowFilter<I, W>
where
    I: Iterator<Item = W::InputType>,
    W: Window,
{
    fn window(self, window: W) -> WindowIter<I, W>;
}

impl<I, W> WindowFilter<I, W> for I
where
    I: Iterator<Item = W::InputType>,
    W: Window,
{
    fn window(self, window: W) -> WindowIter<I, W> {
        WindowIter::<I, W>::new(self, window)
    }
}
